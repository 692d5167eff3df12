use dioxus::prelude::*;

use crate::shared::types::{CreatedPool, HomeCounts};

/// What the browser sees; the detailed chain stays in the server log.
#[cfg(feature = "server")]
fn backend_error(op: &str, e: anyhow::Error) -> ServerFnError {
    use dioxus::logger::tracing::error;

    error!("{op}: {e:#}");
    ServerFnError::new(format!("{op} failed"))
}

#[server(GetHomeCounts)]
pub async fn get_home_counts() -> Result<HomeCounts, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::{self, loader::load_home_counts};

        let api = backend::api().map_err(|e| backend_error("get_home_counts", e))?;
        load_home_counts(api.as_ref())
            .await
            .map_err(|e| backend_error("get_home_counts", e))
    }
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("server functions only run on the server"))
    }
}

#[server(CreatePool)]
pub async fn create_pool(title: String) -> Result<CreatedPool, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::{self, copa_api::CopaBackend};
        use dioxus::logger::tracing::info;

        let api = backend::api().map_err(|e| backend_error("create_pool", e))?;
        let code = api
            .create_pool(&title)
            .await
            .map_err(|e| backend_error("create_pool", e))?;
        info!("create_pool: created {title:?} with code {code}");
        Ok(CreatedPool { code })
    }
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("server functions only run on the server"))
    }
}
