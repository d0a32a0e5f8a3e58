// Application state for HTTP handlers
use crate::application::assistant_service::AssistantService;

#[derive(Clone)]
pub struct AppState {
    pub assistant: AssistantService,
}
