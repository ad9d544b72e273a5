use dioxus::prelude::*;
use techstore_common::{personalized_message, DeviceClass};

/// Headline chosen by device class
#[component]
pub fn PersonalizationStub(device: DeviceClass) -> Element {
    let message = personalized_message(device);
    rsx! {
        h3 { "data-testid": "personalized", "{message}" }
    }
}
