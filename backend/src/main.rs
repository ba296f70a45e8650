use moon::*;
use shared::DocsConfig;

const DEBUG_BACKEND: bool = false;

macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            println!($($arg)*);
        }
    };
}

/// Same navigation config the frontend embeds; only the title is used here.
const DOCS_NAV_TOML: &str = include_str!("../../frontend/docs_nav.toml");

fn page_title() -> String {
    match DocsConfig::from_toml_str(DOCS_NAV_TOML) {
        Ok(config) => config.app.title,
        Err(error) => {
            eprintln!("Invalid navigation config, using default title: {}", error);
            shared::AppSection::default().title
        }
    }
}

async fn frontend() -> Frontend {
    Frontend::new().title(page_title()).index_by_robots(false)
}

async fn up_msg_handler(req: UpMsgRequest<()>) {
    // The documentation frontend sends no messages.
    debug_log!(DEBUG_BACKEND, "Ignoring UpMsg from session {:?}", req.session_id);
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("BACKEND PANIC: {:?}", panic_info);
    }));

    start(frontend, up_msg_handler, |_error| {}).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_comes_from_embedded_config() {
        assert_eq!(page_title(), "Docs");
    }
}
