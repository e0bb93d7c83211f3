use dioxus::prelude::*;
use folio_core::{PROFILE, Preferences, SiteConfig};

use crate::motion::ScrollEffects;
use crate::platform::{HtmlRoot, LocalStore};
use crate::sections::{About, Contact, Experience, Footer, Hero, Navbar, Projects, Skills};

/// 编译期嵌入的站点配置
const SITE_JSON: &str = include_str!("../site.json");
const MAIN_CSS: &str = include_str!("../assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| SiteConfig::from_json(SITE_JSON));
    use_context_provider(|| Signal::new(Preferences::init(LocalStore, HtmlRoot::new())));

    rsx! {
        document::Title { "{PROFILE.name}" }
        style { {MAIN_CSS} }

        Navbar {}
        main {
            Hero {}
            About {}
            Skills {}
            Projects {}
            Experience {}
            Contact {}
        }
        Footer {}
        ScrollEffects {}
    }
}
