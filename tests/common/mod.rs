//! In-process stand-in for PokeAPI.
//!
//! Serves `pokemon/{name_or_id}` documents and PNG sprites from an axum
//! router on an ephemeral port, counting every sprite download.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use poke_api_mcp::{PokeApiClient, PokeApiConfig};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

/// Bytes served for every sprite: a PNG signature plus a few payload bytes.
pub const SPRITE_BYTES: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, b'I', b'H', b'D', b'R',
];

#[derive(Clone)]
struct FakeState {
    addr: SocketAddr,
    sprite_hits: Arc<AtomicUsize>,
}

pub struct FakePokeApi {
    pub addr: SocketAddr,
    sprite_hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl FakePokeApi {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let sprite_hits = Arc::new(AtomicUsize::new(0));
        let state = FakeState {
            addr,
            sprite_hits: sprite_hits.clone(),
        };

        let app = Router::new()
            .route("/api/v2/pokemon/{name_or_id}", get(pokemon))
            .route("/sprites/{file}", get(sprite))
            .with_state(state);

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            sprite_hits,
            handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/v2", self.addr)
    }

    pub fn sprite_url(&self, id: u32) -> String {
        format!("http://{}/sprites/{}.png", self.addr, id)
    }

    pub fn sprite_hits(&self) -> usize {
        self.sprite_hits.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> PokeApiConfig {
        PokeApiConfig::resolve(None, Some(self.base_url()), None).expect("valid test config")
    }

    pub fn client(&self) -> PokeApiClient {
        PokeApiClient::new(self.config()).expect("client builds")
    }
}

impl Drop for FakePokeApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn pokemon_document(id: u32, name: &str, types: &[&str], sprite: Option<String>) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| {
            json!({
                "slot": i + 1,
                "type": { "name": t, "url": format!("https://pokeapi.co/api/v2/type/{}/", t) }
            })
        })
        .collect();
    json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "types": types,
        "sprites": { "front_default": sprite, "back_default": null }
    })
}

async fn pokemon(State(state): State<FakeState>, Path(name_or_id): Path<String>) -> Response {
    let sprite_for = |id: u32| Some(format!("http://{}/sprites/{}.png", state.addr, id));
    match name_or_id.as_str() {
        "pikachu" | "25" => Json(pokemon_document(
            25,
            "pikachu",
            &["electric"],
            sprite_for(25),
        ))
        .into_response(),
        "charizard" | "6" => Json(pokemon_document(
            6,
            "charizard",
            &["fire", "flying"],
            sprite_for(6),
        ))
        .into_response(),
        "mr-mime" => Json(pokemon_document(122, "mr-mime", &["psychic", "fairy"], None))
            .into_response(),
        "spriteless" => {
            Json(pokemon_document(10001, "spriteless", &["normal"], None)).into_response()
        }
        "brokensprite" => Json(pokemon_document(
            10002,
            "brokensprite",
            &["ghost"],
            Some(format!("http://{}/sprites/missing.png", state.addr)),
        ))
        .into_response(),
        "garbage" => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "{not json",
        )
            .into_response(),
        "outage" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        other => match other.parse::<u32>() {
            Ok(id) if (1..=1025).contains(&id) => Json(pokemon_document(
                id,
                &format!("species-{}", id),
                &["normal"],
                sprite_for(id),
            ))
            .into_response(),
            _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        },
    }
}

async fn sprite(State(state): State<FakeState>, Path(file): Path<String>) -> Response {
    state.sprite_hits.fetch_add(1, Ordering::SeqCst);
    if file == "missing.png" {
        return StatusCode::NOT_FOUND.into_response();
    }
    ([(header::CONTENT_TYPE, "image/png")], SPRITE_BYTES).into_response()
}

/// A base URL nothing is listening on.
pub async fn refused_base_url() -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}/api/v2", addr))
}
