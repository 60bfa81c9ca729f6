//! HTTP client implementation of the text-generation boundary.
//!
//! This module provides a reqwest-based implementation of the
//! [`TextGenerator`](crate::TextGenerator) trait speaking an Ollama-style
//! chat API: `POST {base}/chat` with `stream: true` returns newline-delimited
//! JSON frames, each carrying one narrative fragment.

use std::collections::VecDeque;

use async_trait::async_trait;
use futures_util::{StreamExt, stream};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::retry::RetryPolicy;
use crate::{ChatMessage, TextChunkStream, TextGenerator, WellnessError};

/// Text generator backed by an Ollama-compatible chat endpoint.
#[derive(Clone, Debug)]
pub struct ReqwestTextGenerator {
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatFrame {
    message: Option<FrameMessage>,
    #[serde(default)]
    done: bool,
    error: Option<String>,
}

#[derive(Deserialize)]
struct FrameMessage {
    content: String,
}

impl ReqwestTextGenerator {
    pub fn new(base_url: &str, model: impl Into<String>, api_key: Option<SecretString>) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            client,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.base_url, config.model.clone(), config.api_key.clone())
    }

    fn chat_request(&self, body: &ChatRequest<'_>) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }
        request
    }
}

// Incremental NDJSON framing over the raw byte stream. Frames can split
// across network chunks, so bytes accumulate until a newline lands.
struct FrameState {
    inner: futures_util::stream::BoxStream<'static, reqwest::Result<Vec<u8>>>,
    buf: Vec<u8>,
    pending: VecDeque<Result<String, WellnessError>>,
    finished: bool,
}

impl FrameState {
    fn drain_lines(&mut self) {
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            self.push_frame(&line);
        }
    }

    fn push_frame(&mut self, line: &[u8]) {
        let trimmed: &[u8] = {
            let s = line;
            let start = s.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(s.len());
            let end = s.iter().rposition(|b| !b.is_ascii_whitespace()).map_or(start, |e| e + 1);
            &s[start..end]
        };
        if trimmed.is_empty() {
            return;
        }
        match serde_json::from_slice::<ChatFrame>(trimmed) {
            Ok(frame) => {
                if let Some(error) = frame.error {
                    self.pending
                        .push_back(Err(WellnessError::ServiceUnavailable(error)));
                    self.finished = true;
                    return;
                }
                if let Some(message) = frame.message
                    && !message.content.is_empty()
                {
                    self.pending.push_back(Ok(message.content));
                }
                if frame.done {
                    self.finished = true;
                }
            }
            Err(e) => {
                self.pending
                    .push_back(Err(WellnessError::InvalidResponse(e.to_string())));
                self.finished = true;
            }
        }
    }
}

fn frame_stream(resp: reqwest::Response) -> TextChunkStream {
    let state = FrameState {
        inner: resp.bytes_stream().map(|r| r.map(|b| b.to_vec())).boxed(),
        buf: Vec::new(),
        pending: VecDeque::new(),
        finished: false,
    };

    Box::pin(stream::unfold(state, |mut st| async move {
        loop {
            if let Some(item) = st.pending.pop_front() {
                return Some((item, st));
            }
            if st.finished {
                return None;
            }
            match st.inner.next().await {
                Some(Ok(bytes)) => {
                    st.buf.extend_from_slice(&bytes);
                    st.drain_lines();
                }
                Some(Err(e)) => {
                    st.finished = true;
                    return Some((Err(WellnessError::Http(e)), st));
                }
                None => {
                    st.finished = true;
                    if !st.buf.is_empty() {
                        let rest = std::mem::take(&mut st.buf);
                        st.push_frame(&rest);
                    }
                }
            }
        }
    }))
}

#[async_trait]
impl TextGenerator for ReqwestTextGenerator {
    async fn stream_text(&self, messages: Vec<ChatMessage>) -> Result<TextChunkStream, WellnessError> {
        let body = ChatRequest {
            model: &self.model,
            messages: &messages,
            stream: true,
        };

        // Only the initial request is retried; an established stream is
        // non-restartable.
        let policy = RetryPolicy::default();
        let resp = policy
            .retry_async(|| async { self.chat_request(&body).send().await })
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(256).collect();
            return Err(WellnessError::ServiceUnavailable(format!(
                "generation endpoint returned {status}: {snippet}"
            )));
        }

        tracing::debug!(model = %self.model, "generation stream opened");
        Ok(frame_stream(resp))
    }
}
