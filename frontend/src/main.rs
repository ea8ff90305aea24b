fn main() {
    workwise_frontend::boot();
}
