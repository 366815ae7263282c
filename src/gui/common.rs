use crate::{gui::player, media, resource::config};

#[derive(Clone, Debug, Default)]
pub struct Flags {
    /// Videos to show instead of the configured ones.
    pub sources: Vec<media::Source>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Ignore,
    Exit,
    Save,
    CloseModal,
    Config { event: config::Event },
    Player { id: player::Id, event: player::Event },
    SetSidebarOpen(bool),
}
