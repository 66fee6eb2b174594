use apod_gallery::application::Cli;
use apod_gallery::error::GalleryError;

fn main() {
    if let Err(e) = Cli::run() {
        match e.downcast_ref::<GalleryError>() {
            Some(gallery_error) => {
                log::error!("event=cli_exit status=error error={}", gallery_error);
                eprintln!("Error: {}", gallery_error.user_message());
                std::process::exit(gallery_error.exit_code());
            }
            None => {
                log::error!("event=cli_exit status=error error={:#}", e);
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}
