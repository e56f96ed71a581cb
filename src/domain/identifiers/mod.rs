pub mod setting_name;
pub mod validation;

pub use setting_name::SettingName;
