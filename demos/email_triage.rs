use mailsift::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let pipeline = triage_pipeline();

    let record = pipeline
        .run(EmailState::new("Click now to get free gifts"))
        .await?;
    println!("{:?}", record);

    let record = pipeline
        .run(EmailState::new(
            "Kindly assist with updating the GHCP metrics APIs used in our \
             monitoring dashboards. FYI: The Copilot Metrics API will sunset \
             on April 2nd, 2026.",
        ))
        .await?;
    println!("{:?}", record);

    Ok(())
}
