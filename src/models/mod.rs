// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Conversation, Location, Match, MatchedUser, Message, MessagePreview, NewMatch, Profile,
    ProfileCard, SwipeDirection, TokenPair, User,
};
pub use requests::{
    present, RefreshTokenRequest, SendMessageRequest, SendOtpRequest, SwipeRequest,
    UpdateProfileRequest, VerifyOtpRequest,
};
pub use responses::{
    ConversationsResponse, DiscoverProfilesResponse, HealthResponse, MarkReadResponse,
    MatchesResponse, ProfileResponse, RefreshTokenResponse, SendMessageResponse, SendOtpResponse,
    SuccessResponse, SwipeResponse, ThreadResponse, UpdateProfileResponse, UserResponse,
    VerifyOtpResponse,
};
