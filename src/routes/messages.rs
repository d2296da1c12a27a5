use actix_web::{web, HttpResponse};

use crate::core::{fixtures, is_valid_message_text, tokens};
use crate::error::{ok_json, ApiError, ApiResult};
use crate::models::{
    present, ConversationsResponse, MarkReadResponse, Message, SendMessageRequest,
    SendMessageResponse, ThreadResponse,
};

/// Configure messaging routes
///
/// `/conversations` must be registered ahead of `/{conversationId}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/conversations", web::get().to(list_conversations))
        .route("/send", web::post().to(send_message))
        .route("/{conversationId}", web::get().to(get_thread))
        .route("/{messageId}/read", web::patch().to(mark_read));
}

/// GET /api/messages/conversations
async fn list_conversations() -> ApiResult<HttpResponse> {
    ok_json(&ConversationsResponse {
        success: true,
        conversations: fixtures::conversations(chrono::Utc::now()),
    })
}

/// GET /api/messages/{conversationId}
async fn get_thread(conversation_id: web::Path<String>) -> ApiResult<HttpResponse> {
    let conversation_id = conversation_id.into_inner();

    ok_json(&ThreadResponse {
        success: true,
        messages: fixtures::thread(&conversation_id, chrono::Utc::now()),
        conversation_id,
    })
}

/// Send message endpoint
///
/// POST /api/messages/send
///
/// Request body:
/// ```json
/// {
///   "conversationId": "string",
///   "text": "string"
/// }
/// ```
async fn send_message(req: web::Json<SendMessageRequest>) -> ApiResult<HttpResponse> {
    let (conversation_id, text) = match (present(&req.conversation_id), present(&req.text)) {
        (Some(conversation_id), Some(text)) => (conversation_id, text),
        _ => {
            return Err(ApiError::bad_request(
                "Missing required fields: conversationId, text",
            ))
        }
    };

    if !is_valid_message_text(text) {
        return Err(ApiError::bad_request("Message text too long"));
    }

    let message = Message {
        id: tokens::message_id(),
        conversation_id: conversation_id.to_string(),
        sender_id: fixtures::CURRENT_USER_ID.to_string(),
        text: text.to_string(),
        sent_at: chrono::Utc::now(),
        read: false,
    };

    tracing::debug!("Message {} sent to {}", message.id, message.conversation_id);

    ok_json(&SendMessageResponse {
        success: true,
        message,
    })
}

/// PATCH /api/messages/{messageId}/read
async fn mark_read(message_id: web::Path<String>) -> ApiResult<HttpResponse> {
    ok_json(&MarkReadResponse {
        success: true,
        message_id: message_id.into_inner(),
        read_at: chrono::Utc::now(),
    })
}
