use crate::components::field_builder::FieldBuilderComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <header class="page-header">
                    <h1>{"Form Field Configuration"}</h1>
                    <p>{"Configure your form fields with custom validation rules"}</p>
                </header>
                <FieldBuilderComponent />
            </div>
        }
    }
}
