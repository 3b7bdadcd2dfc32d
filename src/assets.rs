use crate::domain::{ActivityUrl, DiscordId};
use crate::error::ValidationError;
use crate::session::{Session, SessionError};
use crate::utils;
use std::fmt;
use std::fmt::Formatter;

#[derive(thiserror::Error)]
pub enum AssetError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The collaborator's failure, wrapped verbatim; no retry here.
    #[error("external asset request failed")]
    External(#[source] SessionError),

    #[error("the asset service returned no entry for the requested url")]
    MissingAsset,
}

impl fmt::Debug for AssetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

/// Asks the platform to translate an external image URL into a media-proxy
/// asset path usable as an activity image. Identity, the application id
/// and the URL are all validated before the call goes out.
#[tracing::instrument(skip(session))]
pub fn resolve_image_link(
    session: &impl Session,
    application_id: &str,
    image_link: &str,
) -> Result<String, AssetError> {
    if session.current_user().is_none() {
        return Err(ValidationError::NotLoggedIn.into());
    }

    let application_id = DiscordId::parse(application_id)?;
    let image_link = ActivityUrl::parse(image_link)?;

    let urls = [image_link.into_inner()];
    let assets = session
        .external_assets(&application_id, &urls)
        .map_err(AssetError::External)?;

    assets
        .into_iter()
        .next()
        .map(|asset| asset.external_asset_path)
        .ok_or(AssetError::MissingAsset)
}

#[cfg(test)]
mod tests {
    use super::{resolve_image_link, AssetError};
    use crate::domain::DiscordId;
    use crate::error::ValidationError;
    use crate::session::{CurrentUser, ExternalAsset, Session, SessionError};
    use claims::assert_ok_eq;

    enum Outcome {
        Paths(Vec<&'static str>),
        Failure(&'static str),
    }

    struct StubSession {
        user: Option<CurrentUser>,
        outcome: Outcome,
    }

    impl StubSession {
        fn logged_in(outcome: Outcome) -> Self {
            Self {
                user: Some(CurrentUser {
                    id: DiscordId::parse("123456789012345678").unwrap(),
                }),
                outcome,
            }
        }
    }

    impl Session for StubSession {
        fn current_user(&self) -> Option<&CurrentUser> {
            self.user.as_ref()
        }

        fn external_assets(
            &self,
            _application_id: &DiscordId,
            image_urls: &[String],
        ) -> Result<Vec<ExternalAsset>, SessionError> {
            match &self.outcome {
                Outcome::Paths(paths) => Ok(paths
                    .iter()
                    .zip(image_urls)
                    .map(|(path, url)| ExternalAsset {
                        url: url.clone(),
                        external_asset_path: path.to_string(),
                    })
                    .collect()),
                Outcome::Failure(message) => Err(anyhow::anyhow!(*message).into()),
            }
        }
    }

    #[test]
    fn the_first_resolved_path_is_returned() {
        let session = StubSession::logged_in(Outcome::Paths(vec!["external/abc123"]));

        let result = resolve_image_link(
            &session,
            "123456789012345678",
            "https://example.com/cover.png",
        );
        assert_ok_eq!(result, "external/abc123".to_string());
    }

    #[test]
    fn a_logged_out_session_is_a_validation_failure() {
        let session = StubSession {
            user: None,
            outcome: Outcome::Paths(vec![]),
        };

        let err = resolve_image_link(
            &session,
            "123456789012345678",
            "https://example.com/cover.png",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AssetError::Validation(ValidationError::NotLoggedIn)
        ));
    }

    #[test]
    fn a_malformed_application_id_is_rejected_before_the_call() {
        let session = StubSession::logged_in(Outcome::Failure("must not be reached"));

        let err =
            resolve_image_link(&session, "12345", "https://example.com/cover.png").unwrap_err();
        assert!(matches!(err, AssetError::Validation(_)));
    }

    #[test]
    fn a_malformed_url_is_rejected_before_the_call() {
        let session = StubSession::logged_in(Outcome::Failure("must not be reached"));

        let err = resolve_image_link(&session, "123456789012345678", "cover.png").unwrap_err();
        assert!(matches!(err, AssetError::Validation(_)));
    }

    #[test]
    fn a_collaborator_failure_is_wrapped_with_its_source() {
        let session = StubSession::logged_in(Outcome::Failure("gateway timeout"));

        let err = resolve_image_link(
            &session,
            "123456789012345678",
            "https://example.com/cover.png",
        )
        .unwrap_err();

        match err {
            AssetError::External(source) => {
                assert_eq!(source.to_string(), "gateway timeout");
            }
            other => panic!("expected an external error, got {other:?}"),
        }
    }

    #[test]
    fn an_empty_response_is_a_missing_asset() {
        let session = StubSession::logged_in(Outcome::Paths(vec![]));

        let err = resolve_image_link(
            &session,
            "123456789012345678",
            "https://example.com/cover.png",
        )
        .unwrap_err();
        assert!(matches!(err, AssetError::MissingAsset));
    }
}
