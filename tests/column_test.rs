
use fixtures::{TestUser, sample_users};
use rstest::*;
use veranda_screen::{
	Align, Column, FilterKind, FilterValue, FilterWidget, Loop, MessageCatalog, RenderContext,
	is_show_visible_columns,
};

#[rstest]
#[case(FilterKind::DateRange, FilterWidget::DateRange)]
#[case(FilterKind::NumberRange, FilterWidget::NumberRange)]
#[case(FilterKind::Text, FilterWidget::Input { input_type: "text".to_string() })]
#[case(FilterKind::Number, FilterWidget::Input { input_type: "number".to_string() })]
#[case(FilterKind::Custom("fuzzy".to_string()), FilterWidget::Input { input_type: "fuzzy".to_string() })]
#[case(FilterKind::Date, FilterWidget::DatePicker { format: "%Y-%m-%d".to_string(), inline: true })]
fn test_filter_widget_mapping(#[case] kind: FilterKind, #[case] expected: FilterWidget) {
	let column = Column::<TestUser>::new("name", "Name").filter(kind);
	let ctx = RenderContext::new("/admin/users");
	let header = column.build_header(&ctx).unwrap();
	assert_eq!(header.filter.unwrap().widget, expected);
}

#[rstest]
fn test_select_filter_carries_options() {
	let column = Column::<TestUser>::new("status", "Status")
		.filter(FilterKind::Select)
		.filter_options([("open", "Open"), ("closed", "Closed")]);
	let ctx = RenderContext::new("/admin/tickets");
	let filter = column.build_header(&ctx).unwrap().filter.unwrap();
	assert_eq!(
		filter.widget,
		FilterWidget::Select {
			options: vec![
				("open".to_string(), "Open".to_string()),
				("closed".to_string(), "Closed".to_string()),
			],
			multiple: true,
		}
	);
}

#[rstest]
fn test_no_filter_kind_means_no_filter_control() {
	let column = Column::<TestUser>::new("name", "Name");
	let ctx = RenderContext::new("/admin/users");
	let header = column.build_header(&ctx).unwrap();
	assert!(header.filter.is_none());
	assert!(header.filter_string.is_none());
}

#[rstest]
fn test_filter_input_wiring() {
	let mut catalog = MessageCatalog::new("de");
	catalog.add_translation("Filter", "Filtern");
	let ctx = RenderContext::from_query("/admin/users", "filter%5Bname%5D=ali")
		.with_catalog(catalog);
	let column = Column::<TestUser>::new("name", "Name").filter(FilterKind::Text);

	let filter = column.build_header(&ctx).unwrap().filter.unwrap();
	assert_eq!(filter.name, "filter[name]");
	assert_eq!(filter.placeholder, "Filtern");
	assert_eq!(filter.form, "filters");
	assert!(filter.autofocus);
	assert_eq!(filter.value, Some(FilterValue::Scalar("ali".to_string())));
}

#[rstest]
fn test_complex_widget_reads_structured_value() {
	let ctx = RenderContext::from_query(
		"/admin/tickets",
		"filter[status][]=open&filter[status][]=closed",
	);
	let column = Column::<TestUser>::new("status", "Status").filter(FilterKind::Select);

	let filter = column.build_header(&ctx).unwrap().filter.unwrap();
	assert_eq!(
		filter.value,
		Some(FilterValue::Many(vec![
			"open".to_string(),
			"closed".to_string()
		]))
	);
}

#[rstest]
fn test_scalar_widget_ignores_structured_value() {
	let ctx = RenderContext::from_query("/admin/tickets", "filter[status][]=open");
	let column = Column::<TestUser>::new("status", "Status").filter(FilterKind::Text);

	let filter = column.build_header(&ctx).unwrap().filter.unwrap();
	assert_eq!(filter.value, None);
}

#[rstest]
fn test_filter_string_formats_range() {
	let ctx = RenderContext::from_query(
		"/admin/users",
		"filter[created_at][start]=2020-01-01&filter[created_at][end]=",
	);
	let column = Column::<TestUser>::new("created_at", "Created").filter(FilterKind::DateRange);
	assert_eq!(
		column.filter_string(&ctx).as_deref(),
		Some("2020-01-01 - ")
	);
}

#[rstest]
fn test_filter_string_maps_options() {
	let ctx = RenderContext::from_query("/admin", "filter[tag][]=a&filter[tag][]=b");
	let column = Column::<TestUser>::new("tag", "Tag")
		.filter(FilterKind::Select)
		.filter_options([("a", "Alpha"), ("b", "Beta")]);
	assert_eq!(column.filter_string(&ctx).as_deref(), Some("Alpha, Beta"));
}

#[rstest]
fn test_filter_string_custom_formatter_wins() {
	let ctx = RenderContext::from_query("/admin", "filter[active]=1");
	let column = Column::<TestUser>::new("active", "Active")
		.filter(FilterKind::Text)
		.filter_value_with(|_| "enabled only".to_string());
	assert_eq!(column.filter_string(&ctx).as_deref(), Some("enabled only"));
}

#[rstest]
fn test_sort_url_toggles_and_preserves_query() {
	let column = Column::<TestUser>::new("name", "Name").sort(true);

	let first = RenderContext::from_query("/admin/users", "page=2&sort=name&q=ab");
	let url = column.build_sort_url(&first).unwrap();
	assert_eq!(url, "/admin/users?page=2&sort=-name&q=ab");

	let second = RenderContext::from_query("/admin/users", "page=2&sort=-name&q=ab");
	let url = column.build_sort_url(&second).unwrap();
	assert_eq!(url, "/admin/users?page=2&sort=name&q=ab");
}

#[rstest]
fn test_sort_url_from_other_column_starts_ascending() {
	let column = Column::<TestUser>::new("email", "Email").sort(true);
	let ctx = RenderContext::from_query("/admin/users", "sort=name");
	assert_eq!(
		column.build_sort_url(&ctx).unwrap(),
		"/admin/users?sort=email"
	);
}

#[rstest]
fn test_build_cell_reads_record_content(sample_users: Vec<TestUser>) {
	let column = Column::<TestUser>::new("email", "Email");
	let cell = column.build_cell(&sample_users[0], None);
	assert_eq!(cell.value, "alice@example.com");
	assert!(!cell.raw);
	assert_eq!(cell.slug, "email");
	assert_eq!(cell.colspan, 1);
}

#[rstest]
fn test_build_cell_uses_render_callback(sample_users: Vec<TestUser>) {
	let column = Column::<TestUser>::new("name", "Name").render(|user, item| {
		let marker = item.map(|state| state.index + 1).unwrap_or_default();
		format!("{}. {}", marker, user.name.to_uppercase())
	});
	let state = Loop::new(1, sample_users.len());
	let cell = column.build_cell(&sample_users[1], Some(&state));
	assert_eq!(cell.value, "2. BOB");
	assert!(cell.raw);
}

#[rstest]
fn test_header_carries_title_slug_and_popover() {
	let column = Column::<TestUser>::new("created_at", "Created")
		.popover("Date the account was created")
		.align_right()
		.width(120);
	let ctx = RenderContext::new("/admin/users");
	let header = column.build_header(&ctx).unwrap();
	assert_eq!(header.column, "created_at");
	assert_eq!(header.title, "Created");
	assert_eq!(header.slug, "created-at");
	assert_eq!(header.align, Align::Right);
	assert_eq!(header.width.as_deref(), Some("120px"));
	assert_eq!(
		header.popover.as_deref(),
		Some("Date the account was created")
	);
}

#[rstest]
fn test_column_menu_omitted_when_hiding_forbidden() {
	let hidden = Column::<TestUser>::new("id", "ID").cant_hide();
	assert!(hidden.build_column_menu().is_none());

	let shown = Column::<TestUser>::new("name", "Name").default_hidden(true);
	let item = shown.build_column_menu().unwrap();
	assert_eq!(item.title, "Name");
	assert_eq!(item.slug, "name");
	assert!(item.default_hidden);
}

#[rstest]
fn test_is_show_visible_columns() {
	let all_locked: Vec<Column<TestUser>> = vec![
		Column::new("id", "ID").cant_hide(),
		Column::new("name", "Name").cant_hide(),
	];
	assert!(!is_show_visible_columns(&all_locked));

	let one_open: Vec<Column<TestUser>> = vec![
		Column::new("id", "ID").cant_hide(),
		Column::new("name", "Name"),
	];
	assert!(is_show_visible_columns(&one_open));

	let none: Vec<Column<TestUser>> = Vec::new();
	assert!(!is_show_visible_columns(&none));
}

#[rstest]
fn test_header_context_serializes_for_templates() {
	let ctx = RenderContext::from_query("/admin/users", "filter[name]=ali");
	let column = Column::<TestUser>::new("name", "Name")
		.sort(true)
		.filter(FilterKind::Text);
	let header = column.build_header(&ctx).unwrap();

	let json = serde_json::to_value(&header).unwrap();
	assert_eq!(json["align"], "start");
	assert_eq!(json["sortable"], true);
	assert_eq!(json["slug"], "name");
	assert_eq!(json["filter"]["widget"], "input");
	assert_eq!(json["filter"]["input_type"], "text");
	assert_eq!(json["filter"]["value"], "ali");
	assert_eq!(json["filter_string"], "ali");
}
