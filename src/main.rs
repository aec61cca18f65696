fn main() {
    gitstamp::app::startup::startup();
}
