use env_logger::{Builder, Env};

pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("info")).try_init();
}
