fn main() {
	luso_lander::ui_main();
}
