use crate::catalog::model::Movie;
use crate::catalog::patch::MoviePatch;
use crate::error::ApiError;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use tracing::info;

#[derive(Debug)]
pub enum CatalogMessage {
    /// List all movies in insertion order.
    List(RpcReplyPort<Vec<Movie>>),

    /// Get a movie by id.
    Get(String, RpcReplyPort<Result<Movie, ApiError>>),

    /// Append a fully-formed movie; the caller has already assigned its id.
    Append(Movie, RpcReplyPort<Movie>),

    /// Patch a movie by id and return the updated record.
    Update(String, MoviePatch, RpcReplyPort<Result<Movie, ApiError>>),

    /// Remove a movie by id.
    Delete(String, RpcReplyPort<Result<(), ApiError>>),
}

#[derive(Clone)]
pub struct CatalogHandle {
    actor: ActorRef<CatalogMessage>,
}

impl CatalogHandle {
    pub async fn list(&self) -> Result<Vec<Movie>, ApiError> {
        ractor::call!(self.actor, CatalogMessage::List)
            .map_err(|e| ApiError::Rpc(format!("CatalogActor List RPC failed: {e}")))
    }

    pub async fn get(&self, id: String) -> Result<Movie, ApiError> {
        ractor::call!(self.actor, CatalogMessage::Get, id)
            .map_err(|e| ApiError::Rpc(format!("CatalogActor Get RPC failed: {e}")))?
    }

    pub async fn append(&self, movie: Movie) -> Result<Movie, ApiError> {
        ractor::call!(self.actor, CatalogMessage::Append, movie)
            .map_err(|e| ApiError::Rpc(format!("CatalogActor Append RPC failed: {e}")))
    }

    pub async fn update(&self, id: String, patch: MoviePatch) -> Result<Movie, ApiError> {
        ractor::call!(self.actor, CatalogMessage::Update, id, patch)
            .map_err(|e| ApiError::Rpc(format!("CatalogActor Update RPC failed: {e}")))?
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        ractor::call!(self.actor, CatalogMessage::Delete, id)
            .map_err(|e| ApiError::Rpc(format!("CatalogActor Delete RPC failed: {e}")))?
    }
}

struct CatalogState {
    movies: Vec<Movie>,
}

struct CatalogActor;

#[ractor::async_trait]
impl Actor for CatalogActor {
    type Msg = CatalogMessage;
    type State = CatalogState;
    type Arguments = Vec<Movie>;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        seed: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!(records = seed.len(), "CatalogActor initialized");
        Ok(CatalogState { movies: seed })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            CatalogMessage::List(reply) => {
                let _ = reply.send(state.movies.clone());
            }
            CatalogMessage::Get(id, reply) => {
                let res = state
                    .movies
                    .iter()
                    .find(|m| m.id == id)
                    .cloned()
                    .ok_or(ApiError::NotFound);
                let _ = reply.send(res);
            }
            CatalogMessage::Append(movie, reply) => {
                state.movies.push(movie.clone());
                let _ = reply.send(movie);
            }
            CatalogMessage::Update(id, patch, reply) => {
                let res = match state.movies.iter_mut().find(|m| m.id == id) {
                    Some(movie) => {
                        patch.apply(movie);
                        Ok(movie.clone())
                    }
                    None => Err(ApiError::NotFound),
                };
                let _ = reply.send(res);
            }
            CatalogMessage::Delete(id, reply) => {
                let res = match state.movies.iter().position(|m| m.id == id) {
                    Some(index) => {
                        state.movies.remove(index);
                        Ok(())
                    }
                    None => Err(ApiError::NotFound),
                };
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

/// Spawns the catalog actor with the given initial records and returns the
/// handle used by request handlers.
pub async fn spawn(seed: Vec<Movie>) -> CatalogHandle {
    let (actor, _join) = Actor::spawn(None, CatalogActor, seed)
        .await
        .expect("failed to spawn CatalogActor");
    CatalogHandle { actor }
}
