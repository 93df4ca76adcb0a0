pub mod headless;
pub mod play;

pub use headless::HeadlessMode;
pub use play::PlayMode;
