fn main() {
  leb::main();
}
