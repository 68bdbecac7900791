use serde::Serialize;

pub trait Method {
    /// Endpoint path, joined to the client's base URL.
    const PATH: &'static str;

    type Response: serde::de::DeserializeOwned;
    type Params: Serialize;
}
