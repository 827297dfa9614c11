use mailsift::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let pipeline = triage_pipeline();

    let records = vec![
        EmailState::new("FREE WINNER!!"),
        EmailState::new("Please contact support about my order"),
        // No content: this record fails without stopping the batch.
        EmailState::default(),
        EmailState::new("Let's schedule a meeting tomorrow"),
    ];

    for result in pipeline.run_batch(records).await {
        match result {
            Ok(record) => println!("{:?}", record),
            Err(error) => println!("Triage failed: {}", error),
        }
    }
}
