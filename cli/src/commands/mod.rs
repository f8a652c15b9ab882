use clap::Subcommand;

use self::{render::RenderCommand, worker::WorkerCommand};

pub mod render;
pub mod worker;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 👷 Worker Mode
    ///
    /// Serve tile computations over HTTP for a dispatcher.
    Worker(WorkerCommand),

    /// 🖼️ Render an image
    ///
    /// Partition a canvas into tiles, fan them out to workers and write
    /// the reassembled result as a PNG.
    Render(RenderCommand),
}
