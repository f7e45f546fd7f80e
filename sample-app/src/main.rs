use std::time::Duration;

use env_logger;
use log::{error, info, LevelFilter};
use simvar::catalog::Catalog;
use simvar::node::SimulatorBuilder;
use simvar::space::memory::MemorySpace;
use tokio::time;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    let catalog = match Catalog::open("data/catalog.json") {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to open catalogue: {e}");
            return;
        }
    };

    let space = MemorySpace::new();
    let simulator = SimulatorBuilder::new(space.clone())
        .with_catalog(catalog)
        .build();

    match simulator.seed().await {
        Ok(inserted) => info!("Seeded {inserted} variables"),
        Err(e) => {
            error!("Failed to seed the catalogue: {e}");
            return;
        }
    }
    info!("Serving {} variables", simulator.variables().len());

    let reader = space.clone();
    tokio::spawn(async move {
        loop {
            for node_id in ["ns=1;s=Temperature", "ns=1;s=MotorSpeed", "ns=1;s=DeviceStatus"] {
                if let Some(value) = reader.read(node_id) {
                    info!("{node_id} = {value:?}");
                }
            }
            time::sleep(Duration::from_secs(1)).await;
        }
    });

    if let Err(e) = tokio::signal::ctrl_c().await {
        println!("Failed to register CTRL-C handler: {e}");
    }
}
