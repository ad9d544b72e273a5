use techstore_web::App;

fn main() {
    dioxus::launch(App);
}
