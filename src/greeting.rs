/// Build the demo greeting line.
pub fn greet(name: &str) -> String {
    format!("hello, {name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet() {
        assert_eq!(greet("world"), "hello, world");
    }

    #[test]
    fn test_greet_empty_name() {
        assert_eq!(greet(""), "hello, ");
    }
}
