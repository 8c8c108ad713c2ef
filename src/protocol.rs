use eframe::egui::Color32;

/// Actions sent from the UI to the message feed
#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    /// Stop emitting messages and shut the feed down
    Stop,
}

/// Events sent from the message feed to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// A chat message arrived
    Message {
        sender: String,
        text: String,
        color: Color32,
    },
    /// The feed has nothing more to send
    Finished,
}
