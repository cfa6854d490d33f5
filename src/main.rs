fn main() {
	pulsegov::init_logging();
	leptos::mount::mount_to_body(pulsegov::App)
}
