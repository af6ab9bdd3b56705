use axum::async_trait;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use axum::Form;
use saarthi_core::Language;
use saarthi_speech::AudioClip;
use serde::Deserialize;

use crate::error::ApiError;

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/wav";

/// `text` and `language` fields, sent either urlencoded or as multipart
/// form data (what browsers send for `FormData`).
#[derive(Debug, Default, Deserialize)]
pub struct QueryFields {
    pub text: Option<String>,
    pub language: Option<String>,
}

impl QueryFields {
    pub fn into_query(self) -> Result<(String, Language), ApiError> {
        let language = parse_language(self.language.as_deref())?;
        let text = self.text.ok_or(ApiError::MissingField("text"))?;
        Ok((text, language))
    }
}

#[async_trait]
impl<S> FromRequest<S> for QueryFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let Form(fields) = Form::<QueryFields>::from_request(req, state)
                .await
                .map_err(|err| ApiError::body(err.status(), err.body_text()))?;
            return Ok(fields);
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|err| ApiError::body(err.status(), err.body_text()))?;
        let mut fields = QueryFields::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| ApiError::body(err.status(), err.body_text()))?
        {
            let name = field.name().map(str::to_owned);
            let value = field
                .text()
                .await
                .map_err(|err| ApiError::body(err.status(), err.body_text()))?;
            match name.as_deref() {
                Some("text") => fields.text = Some(value),
                Some("language") => fields.language = Some(value),
                _ => {}
            }
        }
        Ok(fields)
    }
}

/// Multipart body of `/transcribe`: an `audio` file and optional `language`.
#[derive(Debug)]
pub struct AudioUpload {
    pub audio: AudioClip,
    pub language: Language,
}

#[async_trait]
impl<S> FromRequest<S> for AudioUpload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|err| ApiError::body(err.status(), err.body_text()))?;

        let mut audio = None;
        let mut language = None;
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| ApiError::body(err.status(), err.body_text()))?
        {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("audio") => {
                    let content_type = field
                        .content_type()
                        .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE)
                        .to_string();
                    let file_name = field.file_name().map(str::to_owned);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|err| ApiError::body(err.status(), err.body_text()))?;
                    audio = Some(AudioClip {
                        bytes: bytes.to_vec(),
                        content_type,
                        file_name,
                    });
                }
                Some("language") => {
                    language = Some(
                        field
                            .text()
                            .await
                            .map_err(|err| ApiError::body(err.status(), err.body_text()))?,
                    );
                }
                _ => {}
            }
        }

        let language = parse_language(language.as_deref())?;
        let audio = audio.ok_or(ApiError::MissingField("audio"))?;
        Ok(Self { audio, language })
    }
}

/// Only en/hi/te pass; a missing field means English.
pub fn parse_language(value: Option<&str>) -> Result<Language, ApiError> {
    let code = value.unwrap_or(DEFAULT_LANGUAGE);
    Language::parse(code).ok_or_else(|| ApiError::UnsupportedLanguage(code.to_string()))
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_defaults_to_english() {
        assert_eq!(parse_language(None).unwrap(), Language::En);
        assert_eq!(parse_language(Some("te")).unwrap(), Language::Te);
    }

    #[test]
    fn other_languages_are_rejected() {
        let err = parse_language(Some("ta")).unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedLanguage(code) if code == "ta"));

        for code in ["hindi", "EN", "te-IN"] {
            assert!(matches!(
                parse_language(Some(code)),
                Err(ApiError::UnsupportedLanguage(_))
            ));
        }
    }

    #[test]
    fn language_is_checked_before_text() {
        let fields = QueryFields {
            text: None,
            language: Some("fr".to_string()),
        };
        assert!(matches!(
            fields.into_query(),
            Err(ApiError::UnsupportedLanguage(_))
        ));
    }
}
