pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod counter;
pub mod format;
pub mod nav;
pub mod notification;
pub mod scroll;
pub mod shell;
pub mod visibility;

pub mod components {
    pub mod nav_bar;
    pub mod notification;
    pub mod reveal;
}

pub mod pages {
    pub mod portfolio;
}
