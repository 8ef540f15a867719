/// The GitLab tanuki, 36x36 PNG, base64-encoded for the menu-bar host.
pub const GITLAB_LOGO: &str = "iVBORw0KGgoAAAANSUhEUgAAACQAAAAkCAYAAADhAJiYAAAAAXNSR0IArs4c6QAAAIRlWElmTU0AKgAAAAgABQESAAMAAAABAAEAAAEaAAUAAAABAAAASgEbAAUAAAABAAAAUgEoAAMAAAABAAIAAIdpAAQAAAABAAAAWgAAAAAAAACQAAAAAQAAAJAAAAABAAOgAQADAAAAAQABAACgAgAEAAAAAQAAACSgAwAEAAAAAQAAACQAAAAAODYCaQAAAAlwSFlzAAAWJQAAFiUBSVIk8AAAAVlpVFh0WE1MOmNvbS5hZG9iZS54bXAAAAAAADx4OnhtcG1ldGEgeG1sbnM6eD0iYWRvYmU6bnM6bWV0YS8iIHg6eG1wdGs9IlhNUCBDb3JlIDYuMC4wIj4KICAgPHJkZjpSREYgeG1sbnM6cmRmPSJodHRwOi8vd3d3LnczLm9yZy8xOTk5LzAyLzIyLXJkZi1zeW50YXgtbnMjIj4KICAgICAgPHJkZjpEZXNjcmlwdGlvbiByZGY6YWJvdXQ9IiIKICAgICAgICAgICAgeG1sbnM6dGlmZj0iaHR0cDovL25zLmFkb2JlLmNvbS90aWZmLzEuMC8iPgogICAgICAgICA8dGlmZjpPcmllbnRhdGlvbj4xPC90aWZmOk9yaWVudGF0aW9uPgogICAgICA8L3JkZjpEZXNjcmlwdGlvbj4KICAgPC9yZGY6UkRGPgo8L3g6eG1wbWV0YT4KGV7hBwAAA9VJREFUWAnFmDtrVFEQx7ObhwkBSYzPRsQgKrELWolooVgEUVEQK7E2lfEDiKTwG4htmqhosFbzDUQstBASY6kSjaCC5rH+/mdn7p69u3df2TUDk5l7zpn//M/MuY9NV1dKCoVCTkPYw+he8/OpZU1fghUwsPuEbbghVyYYC3ts4Wl8yUd0uKHgTNSwuW7DGAZvCZWcsbGQs2o4i5zQ8xBS/HPDAnurBjUwCEyfYdyMcJ/ZWCBbAcNCJ3MA/ze6bsFzFpi9kwq00gAYOdTb9dQwha0c+w278kgwGSqAnUIlf4umsILdbYHVd1PKX+ER62T24H8zTJGR3Dbc8uozkTDEf62ViAitBa9QuG6BofQVWWsMEO+Vv2ZYqxHum6qhLPBDd9KCNrAqq4IlT4xQN37tOyOVgfWO/VhAyJ+iSY7EKcMuVYkFvosHttiDvEJfGd/ppFI5My+J8UfIDvxlw/az6Zt9aLjFMxoFDeF/SQWpUk7qSllgJo3SBLF+Lq8arpPQpeN+xvdHS7fOjpfqIv4udA31M6UdrqOSS0XT1QNAbyPKer8zL1tsbJRDuXTDXLCJvJ7IITn2FSqJd6HreCetHOptYKgKEm9X8ap0nl6IEIM57/Exrt+iIldA0wdXVdLhvIPOo9tRrxxuVVF1vqPn0PuocCUxdpxrLJfLvQ8rYDZtlP3Z4zv4H9ZvoOnAlow6Q+/QQ6h66n3HLZNqOyxbkHFRL26DOHVmAT2i5GdRkfG24FYVlVrgnqDqoozBuE3pJSIjUqPoeRGaQCX1CGlNLWDNtypepQmxGzOUTiVrhuRRERqxCPlbJV6MEZH4ZSxaORvt2oDn/ilCOt0S9XGrZVGEXhoLL9tWkprX19wQDD6g/h7Leg51iqjfYcskGM3zuF7BuWfZNOn9tKGOGuVatQx34fIjvNA0QKVm7T2hR3n6JWhTbTV6aftrY9Y45JK3vQ3MRCk7+V6LsWeUW0Lu4qMHR2/yIPiTESnfQTS0aTfGvBXlTTg4kTypAkPsOLpgqeOPfRtqyahFXplF/HElxuo7vVgZZ+eWCd11/qOuH98/zHETMPnNihNR3CN0wMg09sFHgD5JguBvtoVxiyYj3CSHj9W0EFELQ1+xaqHKLNFuG7kLtcYro/bXb1FNRkwCErdwgGuV2yX97e3jsk5EvmL6lQvbh27+jQBIUl78ei1sT4saqFbcwhMQW0IlqobuoPhB94nr41aV7LuoXtJ68ySJWzjI9RyaFo0NGpn2tKgBYnEL9d8SnSfplMfiJ2t8rKOWhMmTFX8UPaiEWFUxmWuWxD/v7A4sRrGUOQAAAABJRU5ErkJggg==";
