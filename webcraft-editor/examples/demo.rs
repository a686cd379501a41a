use dioxus::prelude::*;
use webcraft_core::WebcraftConfig;
use webcraft_editor::WebcraftApp;

const CONFIG: &str = r#"
[editor]
autosave_interval_secs = 30
save_feedback_ms = 2000

[site]
base_path = "/websitebuilder"
"#;

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    let config = use_hook(|| {
        WebcraftConfig::from_toml_str(CONFIG).unwrap_or_else(|err| {
            tracing::warn!(%err, "bad demo config, using defaults");
            WebcraftConfig::default()
        })
    });

    rsx! {
        style {
            "{{
                body, html {{
                    margin: 0;
                    padding: 0;
                    height: 100%;
                    width: 100%;
                }}
            }}"
        }
        WebcraftApp { config }
    }
}
