use rand::{rng, Rng};
use snowflake_id::{install_global_generator, parse_snowflake_id, SnowflakeConfig, SnowflakeGenerator};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // One generator per worker; each thread plays a separate worker in datacenter 2
    let mut handles = vec![];
    for worker_id in 0..4 {
        handles.push(thread::spawn(move || {
            let config = SnowflakeConfig::builder()
                .datacenter_id(2)
                .and_then(|b| b.worker_id(worker_id))
                .expect("worker id in range")
                .build();
            let generator = SnowflakeGenerator::with_config(config);
            let mut ids = Vec::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.generate().expect("clock is monotonic");
                let (ts, dc, worker, seq) = generator.extract.decompose(id);
                println!(
                    "Worker {} generated ID #{} = {} (ts={}, dc={}, worker={}, seq={})",
                    worker_id, i, id, ts, dc, worker, seq
                );
                ids.push(id);
                thread::sleep(Duration::from_millis(rng.random_range(0..=9)));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        let ids = handle.join().unwrap();
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "IDs not monotonic per worker!");
        all_ids.extend(ids);
    }
    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 20, "Duplicate ID generated!");

    // Shared generator installed by the composition root
    let shared = Arc::new(SnowflakeGenerator::new(3, 9).unwrap());
    install_global_generator(Arc::clone(&shared));
    let id = snowflake_id::generate_snowflake_id().unwrap();
    println!("Global generator produced {}", parse_snowflake_id(id));
}
