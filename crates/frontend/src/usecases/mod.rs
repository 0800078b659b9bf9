pub mod u501_template_placeholders;
