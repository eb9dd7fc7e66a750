use courier_dispatch::utils::filter::{displayed_orders, FilterMode};
use courier_dispatch::utils::init_fleet::{load_seed, Seed};
use courier_dispatch::utils::plot::{chart_data, render_chart};
use courier_dispatch::{AssignmentEngine, DispatchError, EngineConfig, OrderAssigner};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let output_path = "dispatch_map.png";

    // Optional arguments: seed file, then config file
    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(path) => match load_seed(&path) {
            Ok(seed) => seed,
            Err(e) => {
                error!("Error loading seed {}: {}", path, e);
                return;
            }
        },
        None => Seed::demo(),
    };
    let config = match args.next() {
        Some(path) => match EngineConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("Error loading config {}: {}", path, e);
                return;
            }
        },
        None => EngineConfig::default(),
    };

    let mut engine = match AssignmentEngine::from_seed(seed, config) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Invalid seed: {}", e);
            return;
        }
    };

    println!("\nCouriers:");
    for courier in engine.couriers() {
        println!(
            "  {} ({}): load {}/{} at ({:.1}, {:.1})",
            courier.id,
            courier.name,
            courier.current_load,
            courier.max_load,
            courier.location.x,
            courier.location.y
        );
    }

    println!("\nPending orders:");
    for order in engine.pending() {
        println!(
            "  {} for {}: priority {} to ({:.1}, {:.1})",
            order.id, order.customer, order.priority, order.destination.x, order.destination.y
        );
    }

    println!("\nAssignments:");
    while engine.can_assign() {
        match engine.assign_next_order() {
            Ok(Some(assignment)) => println!(
                "  {} -> {} ({:.2} away)",
                assignment.order_id, assignment.courier_id, assignment.distance
            ),
            Ok(None) => break,
            Err(DispatchError::NoCapacity) => {
                warn!("All delivery persons are at maximum load!");
                break;
            }
            Err(e) => {
                error!("Assignment failed: {}", e);
                return;
            }
        }
    }

    println!("\nFinal loads:");
    for courier in engine.couriers() {
        println!(
            "  {} ({}): {}/{} ({:.0}%)",
            courier.id,
            courier.name,
            courier.current_load,
            courier.max_load,
            courier.load_ratio() * 100.0
        );
    }

    println!("\nOrders:");
    for order in displayed_orders(engine.pending(), engine.assigned(), "", FilterMode::All) {
        match &order.assigned_to {
            Some(courier_id) => println!(
                "  {} ({}): assigned to {}",
                order.id, order.customer, courier_id
            ),
            None => println!("  {} ({}): pending", order.id, order.customer),
        }
    }

    let data = chart_data(engine.couriers(), engine.pending(), "");
    match render_chart(output_path, &data, "Delivery Optimization System") {
        Ok(()) => info!("Map saved to {}", output_path),
        Err(e) => warn!("Failed to render map: {}", e),
    }
}
