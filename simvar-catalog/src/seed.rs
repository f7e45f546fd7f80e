use log::info;
use simvar_types::{utils, DataType, Waveform};

use crate::{Catalog, NewVariable, StoreError};

struct SeedVariable {
    browse_name: &'static str,
    data_type: DataType,
    minimum_sampling_interval: u64,
    minimum: f64,
    maximum: f64,
    value_type: Waveform,
}

const INITIAL_VARIABLES: &[SeedVariable] = &[
    SeedVariable {
        browse_name: "Temperature",
        data_type: DataType::Double,
        minimum_sampling_interval: 100,
        minimum: -50.0,
        maximum: 100.0,
        value_type: Waveform::Triangle,
    },
    SeedVariable {
        browse_name: "Pressure",
        data_type: DataType::Double,
        minimum_sampling_interval: 100,
        minimum: 0.0,
        maximum: 200.0,
        value_type: Waveform::Random,
    },
    SeedVariable {
        browse_name: "Humidity",
        data_type: DataType::Double,
        minimum_sampling_interval: 100,
        minimum: 0.0,
        maximum: 100.0,
        value_type: Waveform::Square,
    },
    SeedVariable {
        browse_name: "FlowRate",
        data_type: DataType::Double,
        minimum_sampling_interval: 100,
        minimum: 0.0,
        maximum: 500.0,
        value_type: Waveform::Random,
    },
    SeedVariable {
        browse_name: "TankLevel",
        data_type: DataType::Double,
        minimum_sampling_interval: 200,
        minimum: 0.0,
        maximum: 1000.0,
        value_type: Waveform::Triangle,
    },
    SeedVariable {
        browse_name: "MotorSpeed",
        data_type: DataType::Double,
        minimum_sampling_interval: 50,
        minimum: 0.0,
        maximum: 3000.0,
        value_type: Waveform::Sawtooth,
    },
    SeedVariable {
        browse_name: "PowerConsumption",
        data_type: DataType::Double,
        minimum_sampling_interval: 500,
        minimum: 0.0,
        maximum: 10000.0,
        value_type: Waveform::Random,
    },
    SeedVariable {
        browse_name: "DeviceStatus",
        data_type: DataType::Boolean,
        minimum_sampling_interval: 1000,
        minimum: 0.0,
        maximum: 1.0,
        value_type: Waveform::Random,
    },
    SeedVariable {
        browse_name: "Vibration",
        data_type: DataType::Double,
        minimum_sampling_interval: 50,
        minimum: 0.0,
        maximum: 100.0,
        value_type: Waveform::Triangle,
    },
    SeedVariable {
        browse_name: "pH",
        data_type: DataType::Double,
        minimum_sampling_interval: 200,
        minimum: 0.0,
        maximum: 14.0,
        value_type: Waveform::Random,
    },
    SeedVariable {
        browse_name: "BeltSpeed",
        data_type: DataType::Double,
        minimum_sampling_interval: 100,
        minimum: 0.0,
        maximum: 50.0,
        value_type: Waveform::Triangle,
    },
    SeedVariable {
        browse_name: "MaintenanceRequired",
        data_type: DataType::Boolean,
        minimum_sampling_interval: 5000,
        minimum: 0.0,
        maximum: 1.0,
        value_type: Waveform::Random,
    },
    SeedVariable {
        browse_name: "OilPressure",
        data_type: DataType::Double,
        minimum_sampling_interval: 200,
        minimum: 0.0,
        maximum: 150.0,
        value_type: Waveform::Triangle,
    },
    SeedVariable {
        browse_name: "AirQuality",
        data_type: DataType::Double,
        minimum_sampling_interval: 1000,
        minimum: 0.0,
        maximum: 500.0,
        value_type: Waveform::Random,
    },
    SeedVariable {
        browse_name: "BearingTemperature",
        data_type: DataType::Double,
        minimum_sampling_interval: 100,
        minimum: 0.0,
        maximum: 120.0,
        value_type: Waveform::Sawtooth,
    },
    SeedVariable {
        browse_name: "CoolingWaterFlow",
        data_type: DataType::Double,
        minimum_sampling_interval: 150,
        minimum: 0.0,
        maximum: 100.0,
        value_type: Waveform::Square,
    },
    SeedVariable {
        browse_name: "BatteryLevel",
        data_type: DataType::Double,
        minimum_sampling_interval: 1000,
        minimum: 0.0,
        maximum: 100.0,
        value_type: Waveform::Triangle,
    },
    SeedVariable {
        browse_name: "EmergencyStop",
        data_type: DataType::Boolean,
        minimum_sampling_interval: 50,
        minimum: 0.0,
        maximum: 1.0,
        value_type: Waveform::Random,
    },
    SeedVariable {
        browse_name: "ProductionRate",
        data_type: DataType::Double,
        minimum_sampling_interval: 500,
        minimum: 0.0,
        maximum: 1000.0,
        value_type: Waveform::Sawtooth,
    },
    SeedVariable {
        browse_name: "ConveyorSpeed",
        data_type: DataType::Double,
        minimum_sampling_interval: 200,
        minimum: 0.0,
        maximum: 30.0,
        value_type: Waveform::Triangle,
    },
];

/// Inserts the default variable set into `catalog`, skipping entries whose
/// node id is already present.
///
/// Returns the number of variables inserted.
pub fn seed(catalog: &Catalog) -> Result<usize, StoreError> {
    info!("Starting variable seeding...");
    let mut inserted = 0;
    for seed in INITIAL_VARIABLES {
        if catalog.contains_node_id(&utils::derive_node_id(seed.browse_name)) {
            continue;
        }
        catalog.create(NewVariable {
            browse_name: seed.browse_name.to_string(),
            node_id: None,
            data_type: seed.data_type,
            minimum_sampling_interval: seed.minimum_sampling_interval,
            minimum: seed.minimum,
            maximum: seed.maximum,
            value_type: seed.value_type,
        })?;
        info!("Seeded variable: {}", seed.browse_name);
        inserted += 1;
    }
    info!("Variable seeding completed");
    Ok(inserted)
}
