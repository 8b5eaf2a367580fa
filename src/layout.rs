use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    html! {
        <>
            <header class="header">
                <div class="header-title">{"CMMS"}</div>
            </header>

            <nav class="nav">
                <ul class="nav-list">
                    <li class="nav-item"><Link<Route> to={Route::Dashboard}>{"Dashboard"}</Link<Route>></li>
                    <li class="nav-item"><Link<Route> to={Route::Equipment}>{"Equipment"}</Link<Route>></li>
                    <li class="nav-item"><Link<Route> to={Route::Parts}>{"Parts"}</Link<Route>></li>
                    <li class="nav-item"><Link<Route> to={Route::Tasks}>{"Tasks"}</Link<Route>></li>
                    <li class="nav-item"><Link<Route> to={Route::Schedules}>{"Schedules"}</Link<Route>></li>
                </ul>
            </nav>

            <main class="main-content">
                { for props.children.iter() }
            </main>
        </>
    }
}
