use berlin_clock_processor::convert_time;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "13:17:01".to_string());

    let display = convert_time(&time)?;
    println!("{display}");

    Ok(())
}
