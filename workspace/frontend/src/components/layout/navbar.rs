use chrono::Local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let today = Local::now().format("%d/%m/%Y").to_string();

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none px-2">
                <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content text-xl">
                    <i class="fas fa-chart-line"></i>
                </div>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2 text-sm text-gray-500">
                <span class="badge badge-ghost">{"Datos de demostración"}</span>
                <span class="hidden md:inline">{ format!("Actualizado: {}", today) }</span>
            </div>
        </div>
    }
}
