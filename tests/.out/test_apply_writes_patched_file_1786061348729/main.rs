fn main() {
    println!("world");
}
