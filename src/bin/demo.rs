use rugscore::greeting::greet;

fn main() {
    println!("{}", greet("rugscore"));
}
