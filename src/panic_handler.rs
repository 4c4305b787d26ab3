use std::panic;

pub fn initialize_panic_handler() {
    better_panic::install();

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        log::error!("filenamify panicked: {panic_info}");
        default_hook(panic_info);
        std::process::exit(1);
    }));
}
