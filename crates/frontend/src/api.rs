//! HTTP implementation of the backend seam using `gloo-net`.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use ui_core::{ClientConfig, ClientError, PasswordApi, Result};
use web_types::{
    ActionResponse, GenerateResponse, GenerationRequest, SaveRequest, SavedPasswordsResponse,
};

/// Talks to the password-forge backend with `fetch`.
pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

fn transport(err: gloo_net::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response.json::<T>().await.map_err(transport)
}

impl PasswordApi for HttpApi {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateResponse> {
        let response = Request::post(&self.config.endpoint("/generate"))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn save(&self, request: &SaveRequest) -> Result<ActionResponse> {
        let response = Request::post(&self.config.endpoint("/save"))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn list(&self) -> Result<SavedPasswordsResponse> {
        let response = Request::get(&self.config.endpoint("/saved"))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn delete(&self, id: i64) -> Result<ActionResponse> {
        let response = Request::delete(&self.config.endpoint(&format!("/delete/{id}")))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}
