//! Loading and mutating one REST collection from a page.

use log::info;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::{use_api, ApiHandle};
use crate::error::ApiError;
use crate::models::Resource;

/// Request to create (`is_edit == false`) or update a record.
/// `done` fires once the backend accepted it.
pub struct Save<R> {
    pub record: R,
    pub is_edit: bool,
    pub done: Callback<()>,
}

pub struct ResourceList<R: Resource> {
    pub items: UseStateHandle<Vec<R>>,
    pub error: UseStateHandle<Option<String>>,
    pub loading: UseStateHandle<bool>,
    pub reload: Callback<()>,
    pub save: Callback<Save<R>>,
    pub remove: Callback<i64>,
}

/// Message shown under the page title. A 403 on this backend means the
/// session or the CSRF cookie is no longer accepted.
pub fn describe(e: &ApiError) -> String {
    match e.status() {
        Some(403) => format!("{e}: session or CSRF token rejected, reload the page"),
        _ => e.to_string(),
    }
}

async fn load<R: Resource>(
    api: &ApiHandle,
    items: &UseStateHandle<Vec<R>>,
    error: &UseStateHandle<Option<String>>,
) {
    let token = api.get_csrf_token();
    match api.fetch_data::<Vec<R>>(R::ENDPOINT, token.as_deref()).await {
        Ok(rows) => {
            items.set(rows);
            error.set(None);
        }
        Err(e) => error.set(Some(describe(&e))),
    }
}

#[hook]
pub fn use_resource_list<R: Resource>() -> ResourceList<R> {
    let api = use_api();
    let items = use_state(Vec::<R>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    let reload = {
        let api = api.clone();
        let items = items.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let items = items.clone();
            let error = error.clone();
            let loading = loading.clone();
            loading.set(true);
            spawn_local(async move {
                load(&api, &items, &error).await;
                loading.set(false);
            });
        })
    };

    /* initial load */
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let save = {
        let api = api.clone();
        let items = items.clone();
        let error = error.clone();
        Callback::from(move |req: Save<R>| {
            let api = api.clone();
            let items = items.clone();
            let error = error.clone();
            spawn_local(async move {
                // fresh read: the cookie may have rotated since the last call
                let token = api.get_csrf_token();
                let saved = api
                    .save_data::<R, R>(R::ENDPOINT, &req.record, token.as_deref(), req.is_edit)
                    .await;
                match saved {
                    Ok(rec) => {
                        info!("{} {:?} saved", R::ENDPOINT, rec.id());
                        req.done.emit(());
                        load(&api, &items, &error).await;
                    }
                    Err(e) => error.set(Some(describe(&e))),
                }
            });
        })
    };

    let remove = {
        let api = api.clone();
        let items = items.clone();
        let error = error.clone();
        Callback::from(move |id: i64| {
            if !gloo_dialogs::confirm("Delete this record?") {
                return;
            }
            let api = api.clone();
            let items = items.clone();
            let error = error.clone();
            spawn_local(async move {
                let token = api.get_csrf_token();
                match api.delete_data(R::ENDPOINT, id, token.as_deref()).await {
                    Ok(()) => {
                        info!("{} {id} deleted", R::ENDPOINT);
                        load(&api, &items, &error).await;
                    }
                    Err(e) => error.set(Some(describe(&e))),
                }
            });
        })
    };

    ResourceList {
        items,
        error,
        loading,
        reload,
        save,
        remove,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_points_at_the_session() {
        let e = ApiError::Status {
            status: 403,
            status_text: "Forbidden".into(),
            body: String::new(),
        };
        assert_eq!(describe(&e), "HTTP 403 Forbidden: session or CSRF token rejected, reload the page");
    }

    #[test]
    fn other_errors_keep_their_text() {
        let e = ApiError::Transport("offline".into());
        assert_eq!(describe(&e), "network error: offline");
    }
}
