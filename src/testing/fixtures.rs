use crate::domain::{MixinBuilder, SettingMixin};

/// Two settings, `country` (`COUNTRY`, default `Erebor`) and `website`
/// (`WEBSITE`, default `www.erebor.net`).
pub fn erebor_mixin() -> SettingMixin {
    MixinBuilder::new()
        .setting_names(["country", "website"])
        .attribute("country_default", "Erebor")
        .attribute("country_setting", "COUNTRY")
        .attribute("website_default", "www.erebor.net")
        .attribute("website_setting", "WEBSITE")
        .build()
        .expect("erebor fixture is valid")
}
