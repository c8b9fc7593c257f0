use snowflake_id::{SnowflakeError, SnowflakeGenerator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SnowflakeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Datacenter 1, worker 1
    let generator = SnowflakeGenerator::new(1, 1)?;

    let id1 = generator.generate()?;
    let id2 = generator.generate()?;
    let id3 = generator.generate_as_string()?;

    println!("Generated IDs (guaranteed to be monotonic):");
    print_id(id1, &generator);
    print_id(id2, &generator);
    println!("  As string: {id3}");

    // Or extract components individually
    let ts = generator.extract.timestamp_ms(id2);
    let datacenter = generator.extract.datacenter_id(id2);
    let worker = generator.extract.worker_id(id2);
    let seq = generator.extract.sequence(id2);
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {ts} ms since Unix epoch");
    println!("  Datacenter ID: {datacenter}");
    println!("  Worker ID: {worker}");
    println!("  Sequence: {seq}");

    // Out-of-range IDs are rejected at construction
    if let Err(err) = SnowflakeGenerator::new(32, 0) {
        println!("\nRejected: {err}");
    }
    Ok(())
}

fn print_id(id: u64, generator: &SnowflakeGenerator) {
    let parts = generator.parse(id);
    println!(
        "  ID: {id}, Timestamp: {}, Local date: {}, Datacenter: {}, Worker: {}, Sequence: {}",
        parts.timestamp_ms,
        parts.datetime_string(),
        parts.datacenter_id,
        parts.worker_id,
        parts.sequence
    );
}
