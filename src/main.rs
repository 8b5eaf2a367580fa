use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod config;
mod context;
mod csrf;
mod endpoint;
mod error;
mod form;
mod hooks;
mod models;
mod transport;

// Pages
mod dashboard;
mod equipment;
mod layout;
mod parts;
mod schedules;
mod tasks;

#[cfg(test)]
mod test_log;

use context::ApiProvider;
use layout::MainLayout;

/* -------------------- routing -------------------- */

#[derive(Routable, Clone, Debug, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/equipment")]
    Equipment,
    #[at("/parts")]
    Parts,
    #[at("/tasks")]
    Tasks,
    #[at("/schedules")]
    Schedules,
}

fn switch(route: Route) -> Html {
    let page = match route {
        Route::Dashboard => html!(<dashboard::Dashboard />),
        Route::Equipment => html!(<equipment::EquipmentPage />),
        Route::Parts => html!(<parts::PartsPage />),
        Route::Tasks => html!(<tasks::TasksPage />),
        Route::Schedules => html!(<schedules::SchedulesPage />),
    };
    html!(<MainLayout>{ page }</MainLayout>)
}

/* -------------------- entry point ---------------- */

#[function_component(App)]
fn app() -> Html {
    html! {
        <ApiProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ApiProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const TABLE: [(&str, Route); 5] = [
        ("/", Route::Dashboard),
        ("/equipment", Route::Equipment),
        ("/parts", Route::Parts),
        ("/tasks", Route::Tasks),
        ("/schedules", Route::Schedules),
    ];

    #[test]
    fn each_path_resolves_to_its_page() {
        for (path, route) in TABLE {
            assert_eq!(Route::recognize(path), Some(route.clone()), "{path}");
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn paths_are_declared_once() {
        let paths = Route::routes();
        assert_eq!(paths.len(), 5);
        assert_eq!(paths.iter().collect::<HashSet<_>>().len(), 5);
    }

    #[test]
    fn unknown_path_is_left_to_the_host() {
        assert_eq!(Route::recognize("/vendors"), None);
        assert_eq!(Route::not_found_route(), None);
    }
}
