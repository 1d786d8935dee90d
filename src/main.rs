fn main() {
    tinybasic::term::main()
}
