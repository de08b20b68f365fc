use serde_json::Value;

/// Print one line per plan: label and raw monthly payment, tab-separated.
/// Script-friendly; no currency formatting.
pub fn print_minimal(value: &Value) {
    let plans = value
        .get("plans")
        .and_then(Value::as_array)
        .or_else(|| value.as_array());

    if let Some(plans) = plans {
        for plan in plans {
            let label = plan.get("label").and_then(Value::as_str).unwrap_or("");
            let monthly = plan
                .get("monthly_payment")
                .and_then(Value::as_str)
                .unwrap_or("");
            println!("{}\t{}", label, monthly);
        }
        return;
    }

    println!("{}", value);
}
