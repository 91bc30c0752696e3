use std::path::PathBuf;

use anyhow::Context;
use carenet_core::NetworkData;
use carenet_viz::GraphSpec;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "carenet-cli",
    about = "Dựng chỉ dẫn vẽ sơ đồ mạng lưới từ file JSON xuất ra từ API."
)]
struct Args {
    /// Đường dẫn tới file JSON dữ liệu mạng lưới.
    #[arg(short, long)]
    input: PathBuf,

    /// In toàn bộ chỉ dẫn vẽ thay vì bản tóm tắt.
    #[arg(long)]
    emit_spec: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Không đọc được file {:?}", args.input))?;

    let network: NetworkData =
        serde_json::from_str(&data).context("Không đọc được dữ liệu mạng lưới")?;
    let spec = GraphSpec::from_network(&network);

    if args.emit_spec {
        println!("{}", serde_json::to_string_pretty(&spec)?);
    } else {
        println!(
            "Nodes: {}\nLinks: {}\nDropped edges: {}",
            spec.nodes.len(),
            spec.links.len(),
            spec.dropped_edges
        );
    }

    Ok(())
}
