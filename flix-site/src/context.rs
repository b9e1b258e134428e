use std::rc::Rc;

use flix_client::{CatalogClient, DEFAULT_ORIGIN};
use yew::prelude::*;

use crate::transport::GlooTransport;

/// Origin of the catalog backend, fixed when the site is built.
const API_ORIGIN: &str = match option_env!("FLIX_API_ORIGIN") {
    Some(origin) => origin,
    None => DEFAULT_ORIGIN,
};

pub type ApiClient = CatalogClient<GlooTransport>;

/// The catalog client shared by every page.
#[derive(Clone, Debug)]
pub struct ApiContext {
    client: Rc<ApiClient>,
}

impl ApiContext {
    pub fn client(&self) -> Rc<ApiClient> {
        Rc::clone(&self.client)
    }
}

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    let context = use_memo((), |_| {
        log::info!("Using catalog backend at {API_ORIGIN}");
        ApiContext {
            client: Rc::new(CatalogClient::new(API_ORIGIN, GlooTransport)),
        }
    });

    html! {
        <ContextProvider<ApiContext> context={(*context).clone()}>
            { props.children.clone() }
        </ContextProvider<ApiContext>>
    }
}

#[hook]
pub fn use_api() -> ApiContext {
    use_context::<ApiContext>().expect("ApiContext not found")
}
