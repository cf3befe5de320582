//! Actor documents on disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

use hypermall_domain::Actor;

#[derive(Debug, Error)]
pub enum ActorFileError {
    #[error("Failed to read actor file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid actor document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read an actor document and prepare its derived data.
pub async fn load_actor(path: &Path) -> Result<Actor, ActorFileError> {
    let raw = tokio::fs::read(path).await.map_err(|source| ActorFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut actor: Actor = serde_json::from_slice(&raw).map_err(|source| ActorFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    actor.prepare_derived_data();
    tracing::debug!(actor = %actor.name, kind = actor.kind.type_name(), "Loaded actor");
    Ok(actor)
}

/// Write an actor document back as pretty-printed JSON.
pub async fn save_actor(path: &Path, actor: &Actor) -> Result<(), ActorFileError> {
    let json = serde_json::to_vec_pretty(actor).map_err(|source| ActorFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| ActorFileError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypermall_domain::ActorKind;

    const NPC: &str = r#"{
        "name": "Security Drone",
        "type": "npc",
        "system": {"abilities": {"physick": {"value": 4}}}
    }"#;

    #[tokio::test]
    async fn loads_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drone.json");
        tokio::fs::write(&path, NPC).await.unwrap();

        let mut actor = load_actor(&path).await.unwrap();
        assert_eq!(actor.name, "Security Drone");
        assert!(matches!(actor.kind, ActorKind::Npc(_)));

        actor.name = "Security Drone Mk II".into();
        save_actor(&path, &actor).await.unwrap();
        let reloaded = load_actor(&path).await.unwrap();
        assert_eq!(reloaded, actor);
    }

    #[tokio::test]
    async fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_actor(&dir.path().join("nope.json")).await.unwrap_err();
        assert!(matches!(err, ActorFileError::Io { .. }));
    }

    #[tokio::test]
    async fn invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        tokio::fs::write(&path, r#"{"name": "x", "type": "robot"}"#)
            .await
            .unwrap();
        let err = load_actor(&path).await.unwrap_err();
        assert!(matches!(err, ActorFileError::Json { .. }));
    }
}
