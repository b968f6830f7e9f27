extern crate actix_rt;
use std::path::PathBuf;
use std::sync::Arc;
use actix_web::{web, App, HttpServer};
use structopt::StructOpt;

mod context;
mod cors;
mod dispatch;
mod mappers;
mod options;
mod path;
mod stats;
mod view;

#[cfg(test)]
mod test_util;

#[derive(Debug, StructOpt)]
#[structopt(name = "galjson", about = "Serves a photo gallery's album, image and search data as JSON")]
struct Opts
{
    /// Path to the gallery definition JSON file
    #[structopt(long, parse(from_os_str))]
    gallery: PathBuf,

    /// Address to listen on
    #[structopt(long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Enable the statistics collaborator
    #[structopt(long)]
    enable_stats: bool,
}

pub struct State
{
    store: Arc<gallerydb::Store>,
    stats: Option<gallerydb::StatsProvider>,
}

#[actix_rt::main]
async fn main() -> std::io::Result<()>
{
    let opts = Opts::from_args();

    let store = Arc::new(gallerydb::Store::load(&opts.gallery)
        .expect("Could not load gallery definition"));

    // The statistics collaborator is an optional capability,
    // resolved once here and injected - requests never probe
    // for it themselves.
    let stats = if opts.enable_stats
    {
        Some(gallerydb::StatsProvider::new())
    }
    else
    {
        None
    };

    let bind = opts.bind.clone();

    HttpServer::new(move ||
    {
        let state = State
        {
            store: store.clone(),
            stats,
        };

        App::new()
            .data(state)
            .route("/{tail:.*}", web::get().to(dispatch::handle))
    })
    .bind(bind)?
    .run()
    .await
}
