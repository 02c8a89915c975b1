//! Field configuration builder: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! All configuration rules live in `common::session`; this component is the
//! message plumbing and rendering around one [`common::session::FieldSession`].

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FieldBuilderProps;
pub use state::FieldBuilderComponent;

impl Component for FieldBuilderComponent {
    type Message = Msg;
    type Properties = FieldBuilderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FieldBuilderComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
