use std::ops::Deref;
use std::rc::Rc;

use log::{info, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::config::ApiConfig;

/* ---------------- shared handle ---------------- */

/// Shared browser client, compared by identity so the context only
/// re-renders consumers when the client itself is rebuilt.
#[derive(Clone)]
pub struct ApiHandle(Rc<ApiClient>);

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ApiHandle {
    type Target = ApiClient;

    fn deref(&self) -> &ApiClient {
        &self.0
    }
}

#[hook]
pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>().expect("ApiProvider missing")
}

/* ---------------- provider ---------------- */

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    #[prop_or_default]
    pub config: ApiConfig,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    let client = use_memo(props.config.clone(), |config| ApiClient::browser(config.clone()));
    let handle = ApiHandle(client);

    // priming GET so the backend drops the csrftoken cookie before the first mutation
    {
        let api = handle.clone();
        use_effect_with(api.config().clone(), move |_| {
            spawn_local(async move {
                match api.fetch_csrf_token().await {
                    Ok(Some(_)) => info!("CSRF cookie ready"),
                    Ok(None) => warn!("backend did not set the {} cookie", api.config().csrf_cookie),
                    Err(_) => {}
                }
            });
            || ()
        });
    }

    html! {
        <ContextProvider<ApiHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<ApiHandle>>
    }
}
