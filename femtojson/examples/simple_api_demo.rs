// Example demonstrating the scalar decoding API

use femtojson::{parse, ParseError, SliceParser, Value, ValueType};

fn main() -> Result<(), ParseError> {
    let inputs = [
        "null",
        "  true  ",
        "-0",
        "1e5",
        "3.1416",
        "",
        "nul",
        "false,",
        "1.",
        "1e400",
    ];

    println!("Using femtojson::parse():");
    for input in inputs {
        match parse(input) {
            Ok(value) => match value.get_type() {
                ValueType::Number => println!("{:?} -> Number: {}", input, value.get_number()),
                other => println!("{:?} -> {:?}", input, other),
            },
            Err(e) => println!("{:?} -> {:?}: {}", input, e.kind(), e),
        }
    }

    println!();
    println!("Using SliceParser with caller-owned storage:");
    let mut value = Value::default();
    let mut parser = SliceParser::new(" 2.5e-3 ");
    parser.parse_into(&mut value)?;
    println!("Parsed {} and consumed {} bytes", value, parser.position());

    Ok(())
}
