use serde::{Serialize, Serializer};

use crate::domain::{Channel, Media, MessageText, PhoneNumber, SendMessage, SenderId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum MessageType {
    Plain,
    Whatsapp,
}

/// `sms/send` body.
#[derive(Debug, Serialize)]
pub struct SendMessageBody<'a> {
    to: PhoneNumber,
    from: &'a SenderId,
    #[serde(rename = "type")]
    message_type: MessageType,
    channel: Channel,
    sms: &'a MessageText,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "embed_media"
    )]
    media: Option<EmbeddedMedia<'a>>,
}

#[derive(Debug, Serialize)]
struct EmbeddedMedia<'a> {
    #[serde(rename = "media.url")]
    url: &'a str,
    #[serde(rename = "media.caption", skip_serializing_if = "Option::is_none")]
    caption: Option<&'a str>,
}

impl<'a> From<&'a Media> for EmbeddedMedia<'a> {
    fn from(media: &'a Media) -> Self {
        Self {
            url: media.url.as_str(),
            caption: media.caption.as_deref(),
        }
    }
}

/// Termii takes media as one JSON document embedded in a string field.
fn embed_media<S: Serializer>(
    media: &Option<EmbeddedMedia<'_>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let document = serde_json::to_string(media).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&document)
}

pub fn encode_send_message_body(request: &SendMessage) -> SendMessageBody<'_> {
    let media = request.deliverable_media().map(EmbeddedMedia::from);
    let message_type = match media {
        Some(_) => MessageType::Whatsapp,
        None => MessageType::Plain,
    };

    SendMessageBody {
        to: request.to(),
        from: request.sender(),
        message_type,
        channel: request.selected_channel(),
        sms: request.sms(),
        media,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::domain::MediaUrl;

    use super::*;

    fn message() -> SendMessage {
        SendMessage::new(
            PhoneNumber::new(1234567890).unwrap(),
            SenderId::new("TestSender").unwrap(),
            MessageText::new("Hello, this is a test message").unwrap(),
        )
    }

    fn media() -> Media {
        Media::new(MediaUrl::new("https://example.com/cat.png").unwrap()).with_caption("A cat")
    }

    fn encode(request: &SendMessage) -> Value {
        serde_json::to_value(encode_send_message_body(request)).unwrap()
    }

    #[test]
    fn plain_message_body() {
        assert_eq!(
            encode(&message()),
            json!({
                "to": 1234567890u64,
                "from": "TestSender",
                "type": "plain",
                "channel": "generic",
                "sms": "Hello, this is a test message",
            })
        );
    }

    #[test]
    fn whatsapp_media_sets_type_and_embeds_media() {
        let request = message().channel(Channel::Whatsapp).media(media());
        let body = encode(&request);

        assert_eq!(body["type"], "whatsapp");
        assert_eq!(body["channel"], "whatsapp");

        let embedded = body["media"].as_str().unwrap();
        let parsed: Value = serde_json::from_str(embedded).unwrap();
        assert_eq!(
            parsed,
            json!({
                "media.url": "https://example.com/cat.png",
                "media.caption": "A cat",
            })
        );
    }

    #[test]
    fn caption_is_omitted_when_absent() {
        let media = Media::new(MediaUrl::new("https://example.com/cat.png").unwrap());
        let request = message().channel(Channel::Whatsapp).media(media);
        let body = encode(&request);

        let parsed: Value = serde_json::from_str(body["media"].as_str().unwrap()).unwrap();
        assert_eq!(parsed, json!({ "media.url": "https://example.com/cat.png" }));
    }

    #[test]
    fn media_is_dropped_off_whatsapp() {
        for channel in [Channel::Generic, Channel::Dnd] {
            let request = message().channel(channel).media(media());
            let body = encode(&request);
            assert_eq!(body["type"], "plain");
            assert!(body.get("media").is_none(), "{channel:?}");
        }
    }

    #[test]
    fn whatsapp_without_media_is_plain() {
        let request = message().channel(Channel::Whatsapp);
        let body = encode(&request);
        assert_eq!(body["type"], "plain");
        assert!(body.get("media").is_none());
    }
}
