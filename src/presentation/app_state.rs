// Application state for HTTP handlers
use crate::application::live_poller::LivePoller;
use crate::application::prediction_requester::PredictionRequester;
use crate::application::session::SharedSession;

#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    pub live_poller: LivePoller,
    pub prediction_requester: PredictionRequester,
}
